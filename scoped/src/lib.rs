// Copyright 2026 scoped Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scoping functions for any Rust value.
//!
//! [`Scoped`] is implemented for every type and provides [`apply`](Scoped::apply), [`also`](Scoped::also),
//! [`let_`](Scoped::let_), [`take_if`](Scoped::take_if) and [`take_unless`](Scoped::take_unless). The free function
//! [`with`] runs a closure against a mutable copy of a value and returns the closure's result.
//!
//! ```
//! use scoped::prelude::*;
//!
//! #[derive(Debug, Default, Clone)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let adam = Person::default().apply(|p| {
//!     p.name = "adam".to_string();
//!     p.age = 32;
//! });
//! let greeting = adam
//!     .take_if(|p| p.age >= 18)
//!     .let_(|p| p.map_or_else(String::new, |p| format!("hi, {}", p.name)));
//! assert_eq!(greeting, "hi, adam");
//! ```
//!
//! # Failures
//!
//! The library defines no error type. Every operation has a `try_` twin taking a closure that returns
//! [`Result`]; the closure's error is handed back unchanged. Panics unwind through every operation untouched.
//!
//! # Features
//!
//! - `tracing`: record a [fastrace](https://docs.rs/fastrace) span for every operation.

mod scope;
mod with;

pub mod prelude;

pub use scope::Scoped;
pub use with::{try_with, with};
