//! Core logic: conversion features, history, application state
//!
//! - `features`: conversion, formatting, unit aliases and bulk parsing
//! - `history`: bounded conversion history and its persistence backends
//! - `state` / `calculator`: the application state and the interactive session

pub mod calculator;
pub mod debounce;
pub mod features;
pub mod history;
pub mod i18n;
pub mod state;

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Mutex poisoned, recovering...");
            poisoned.into_inner()
        }
    }
}
