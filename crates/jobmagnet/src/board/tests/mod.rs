mod common;
mod query;
mod service;
