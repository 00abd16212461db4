pub mod agentdb;
pub mod db;
pub mod enquirydb;
pub mod propertydb;
pub mod savedpropertydb;
pub mod sessiondb;
pub mod userdb;
