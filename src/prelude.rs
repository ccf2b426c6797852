// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! numcore prelude.
//!
//! This module contains the most used types, functions and macros that you
//! can import easily as a group.
//!
//! ```
//! use numcore::prelude::*;
//!
//! let a = fixed![1., 2., 3.];
//! assert_eq!(a.dtype(), DType::Real);
//! ```

#[doc(no_inline)]
pub use crate::{ArrayError, DType, ErrorKind, FixedArray, Operand, Scalar};

#[doc(no_inline)]
pub use crate::{arr1, arr2};

#[doc(no_inline)]
pub use crate::pixel::{Filter, PixelBuffer, Strategy};

pub use crate::fixed;
