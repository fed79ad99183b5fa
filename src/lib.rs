//! A typed client for the support resources of an HPE OneView appliance.

pub mod app_config;
pub mod ov;
pub mod rest;
