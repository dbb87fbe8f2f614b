#![allow(dead_code)]

pub mod fake_finance_server;
pub mod scripted_finance_api;
