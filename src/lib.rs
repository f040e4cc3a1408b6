// ABOUTME: Library crate for the soulbound dashboard exposing the gateway client, forms and CLI

#![allow(missing_docs)]

pub mod audit;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod gateway;
