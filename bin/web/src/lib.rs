//! EcoCycle web client.
//!
//! This crate provides the Leptos-based browser interface for the
//! EcoCycle recycling rewards platform. Session state and route access
//! rules live in `ecocycle-access`, HTTP in `ecocycle-client`; this crate
//! wires both to the browser.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod session;
pub mod storage;
