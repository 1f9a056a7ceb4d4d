mod auth_flow_tests;
mod cars_tests;
mod leads_tests;
mod page_tests;
