pub mod chatdtos;
pub mod enquirydtos;
pub mod propertydtos;
pub mod savedpropertydtos;
pub mod userdtos;
