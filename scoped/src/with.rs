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

/// Run `f` against a mutable local copy of `receiver` and return what `f` returns.
///
/// Unlike [`Scoped::apply`](crate::Scoped::apply), the mutated copy is dropped at the end of the call; only the
/// closure's result escapes.
///
/// ```
/// use scoped::with;
///
/// let label = with(0, |n| {
///     *n = 10;
///     format!("n = {n}")
/// });
/// assert_eq!(label, "n = 10");
/// ```
#[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::with"))]
pub fn with<T, R, F>(mut receiver: T, f: F) -> R
where
    F: FnOnce(&mut T) -> R,
{
    f(&mut receiver)
}

/// Fallible version of [`with`].
#[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::try_with"))]
pub fn try_with<T, R, E, F>(mut receiver: T, f: F) -> Result<R, E>
where
    F: FnOnce(&mut T) -> Result<R, E>,
{
    f(&mut receiver)
}
