pub mod agentmodel;
pub mod enquirymodel;
pub mod propertymodel;
pub mod savedpropertymodel;
pub mod sessionmodel;
pub mod usermodel;
