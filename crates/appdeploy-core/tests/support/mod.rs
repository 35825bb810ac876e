#![allow(dead_code)]

pub mod sdk;
