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

/// Scoped functional programming extensions.
///
/// Implemented for every type, so any value can be configured, inspected, mapped or filtered inline without
/// introducing a temporary binding.
///
/// Each operation has a `try_` twin taking a closure that returns [`Result`]. The closure's error is returned as is.
/// Panics raised by a closure unwind through the operation untouched.
pub trait Scoped {
    /// Mutate the receiver in place with `f` and return it.
    ///
    /// The receiver is moved (or copied, for [`Copy`] types) into the call, so the caller's binding never observes
    /// the mutation. Use [`Scoped::apply_cloned`] to keep a non-[`Copy`] original around.
    ///
    /// ```
    /// use scoped::Scoped;
    ///
    /// let v = Vec::with_capacity(2).apply(|v| {
    ///     v.push(1);
    ///     v.push(2);
    /// });
    /// assert_eq!(v, vec![1, 2]);
    /// ```
    #[must_use]
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::apply"))]
    fn apply<F>(mut self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }

    /// Fallible version of [`Scoped::apply`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_apply"))]
    fn try_apply<F, E>(mut self, f: F) -> Result<Self, E>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        f(&mut self)?;
        Ok(self)
    }

    /// Mutate a shallow copy of the receiver with `f` and return the copy.
    ///
    /// The copy is made with [`Clone`]. For shared handles (e.g. [`std::rc::Rc`], [`std::sync::Arc`]) the copy points
    /// to the same storage, so mutation through interior mutability is visible to every holder.
    #[must_use]
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::apply_cloned"))]
    fn apply_cloned<F>(&self, f: F) -> Self
    where
        Self: Clone,
        F: FnOnce(&mut Self),
    {
        self.clone().apply(f)
    }

    /// Fallible version of [`Scoped::apply_cloned`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_apply_cloned"))]
    fn try_apply_cloned<F, E>(&self, f: F) -> Result<Self, E>
    where
        Self: Clone,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.clone().try_apply(f)
    }

    /// Run a side effect on the receiver and return it unchanged.
    ///
    /// ```
    /// use scoped::Scoped;
    ///
    /// let mut seen = None;
    /// let n = 42.also(|n| seen = Some(*n));
    /// assert_eq!((n, seen), (42, Some(42)));
    /// ```
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::also"))]
    fn also<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Fallible version of [`Scoped::also`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_also"))]
    fn try_also<F, E>(self, f: F) -> Result<Self, E>
    where
        Self: Sized,
        F: FnOnce(&Self) -> Result<(), E>,
    {
        f(&self)?;
        Ok(self)
    }

    /// Map the receiver with `f` and return whatever `f` returns.
    ///
    /// Named with a trailing underscore because `let` is a reserved word.
    ///
    /// ```
    /// use scoped::Scoped;
    ///
    /// assert_eq!("scoped".let_(str::len), 6);
    /// ```
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::let"))]
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Fallible version of [`Scoped::let_`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_let"))]
    fn try_let<F, R, E>(self, f: F) -> Result<R, E>
    where
        Self: Sized,
        F: FnOnce(Self) -> Result<R, E>,
    {
        f(self)
    }

    /// Return `Some(self)` if `predicate` holds, `None` otherwise.
    ///
    /// ```
    /// use scoped::Scoped;
    ///
    /// assert_eq!(5.take_if(|x| *x > 3), Some(5));
    /// assert_eq!(2.take_if(|x| *x > 3), None);
    /// ```
    #[must_use]
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::take_if"))]
    fn take_if<P>(self, predicate: P) -> Option<Self>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        let taken = predicate(&self);
        #[cfg(feature = "tracing")]
        tracing::trace!(taken, "[scope]: take_if");
        taken.then_some(self)
    }

    /// Fallible version of [`Scoped::take_if`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_take_if"))]
    fn try_take_if<P, E>(self, predicate: P) -> Result<Option<Self>, E>
    where
        Self: Sized,
        P: FnOnce(&Self) -> Result<bool, E>,
    {
        let taken = predicate(&self)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(taken, "[scope]: try_take_if");
        Ok(taken.then_some(self))
    }

    /// Return `Some(self)` if `predicate` does NOT hold, `None` otherwise.
    #[must_use]
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::take_unless"))]
    fn take_unless<P>(self, predicate: P) -> Option<Self>
    where
        Self: Sized,
        P: FnOnce(&Self) -> bool,
    {
        let taken = !predicate(&self);
        #[cfg(feature = "tracing")]
        tracing::trace!(taken, "[scope]: take_unless");
        taken.then_some(self)
    }

    /// Fallible version of [`Scoped::take_unless`].
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "scoped::scope::try_take_unless"))]
    fn try_take_unless<P, E>(self, predicate: P) -> Result<Option<Self>, E>
    where
        Self: Sized,
        P: FnOnce(&Self) -> Result<bool, E>,
    {
        let taken = !predicate(&self)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(taken, "[scope]: try_take_unless");
        Ok(taken.then_some(self))
    }
}

impl<T> Scoped for T {}
