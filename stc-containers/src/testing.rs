// STC - stc-containers
// Module: Testing - shared lifetime instrumentation
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Drop instrumentation shared by the container unit tests.

use std::cell::Cell;
use std::rc::Rc;

/// Counts its own drops (and its clones' drops) in a shared counter.
#[derive(Clone)]
pub(crate) struct DropLogger {
    counter: Rc<Cell<usize>>,
}

impl DropLogger {
    pub(crate) fn new(counter: &Rc<Cell<usize>>) -> Self {
        Self {
            counter: Rc::clone(counter),
        }
    }
}

impl Drop for DropLogger {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}

/// Fresh shared drop counter.
pub(crate) fn drop_counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}
