pub mod config;
pub mod indistreet;
pub mod page;
pub mod site;
pub mod util;
