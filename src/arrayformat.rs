// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{FixedArray, Grid, Scalar};

fn format_row<F>(row: &[Scalar], f: &mut fmt::Formatter<'_>, format: &mut F) -> fmt::Result
where F: FnMut(&Scalar, &mut fmt::Formatter<'_>) -> fmt::Result
{
    write!(f, "[")?;
    for (i, elt) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        format(elt, f)?;
    }
    write!(f, "]")
}

fn format_array<F>(array: &FixedArray, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where F: FnMut(&Scalar, &mut fmt::Formatter<'_>) -> fmt::Result
{
    match array.grid() {
        Grid::Vector(xs) => format_row(xs, f, &mut format),
        Grid::Matrix(rows) => {
            // `{:#}` puts every row on its own line
            let separator = if f.alternate() { ",\n " } else { ", " };
            write!(f, "[")?;
            for (i, row) in rows.enumerate() {
                if i > 0 {
                    write!(f, "{}", separator)?;
                }
                format_row(row, f, &mut format)?;
            }
            write!(f, "]")
        }
    }
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// Rows are nested lists: `[[1, 2, 3], [4, 5, 6]]`. The alternate flag
/// (`{:#}`) shows a matrix in multiline style.
impl fmt::Display for FixedArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, fmt::Display::fmt)
    }
}

/// Format the array using `Display` for the elements and add the shape and
/// data type.
impl fmt::Debug for FixedArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, fmt::Display::fmt)?;
        write!(f, " shape={:?}, dtype={:?}", self.shape(), self.dtype())
    }
}
