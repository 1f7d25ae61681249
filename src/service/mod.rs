pub mod tickets_service;
