// SPDX-License-Identifier: GPL-3.0-only

//! Message handler modules
//!
//! Handlers are grouped by the state machine they drive: the permission
//! gate, the activation controller and the detection debouncer.

pub(crate) mod activation;
pub(crate) mod detection;
pub(crate) mod permission;
