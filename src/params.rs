//! Text codec for exported parameters.
//!
//! The format has two delimiter levels.
//! A weak learner terminates each of its own fields by
//! [`WEAK_LEARNER_DELIM`], and the boosted model terminates
//! each of its fields, including a whole learner blob,
//! by [`ENSEMBLE_DELIM`].
//! Values are always formatted numbers (or short tags),
//! so neither delimiter can occur inside a value.
//!
//! Reading is a single pass from left to right:
//! the blob must be consumed in exactly the order it was written.
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{BoostError, Result};


/// Terminates each field written by a weak learner.
pub const WEAK_LEARNER_DELIM: char = ',';

/// Terminates each field written by the boosted model.
pub const ENSEMBLE_DELIM: char = ';';


/// Appends delimiter-terminated fields to a string.
#[derive(Debug, Default, Clone)]
pub struct ParamWriter {
    buf: String,
}


impl ParamWriter {
    /// Construct an empty writer.
    pub fn new() -> Self {
        Self { buf: String::new() }
    }


    /// Append `value` terminated by `delim`.
    #[inline]
    pub fn push<T: Display>(&mut self, value: T, delim: char) {
        self.buf.push_str(&value.to_string());
        self.buf.push(delim);
    }


    /// Append a weak learner field.
    #[inline]
    pub fn field<T: Display>(&mut self, value: T) {
        self.push(value, WEAK_LEARNER_DELIM);
    }


    /// Append every value of `values` as weak learner fields.
    #[inline]
    pub fn fields<T: Display>(&mut self, values: &[T]) {
        values.iter().for_each(|v| self.field(v));
    }


    /// Append an ensemble-level field.
    #[inline]
    pub fn entry<T: Display>(&mut self, value: T) {
        self.push(value, ENSEMBLE_DELIM);
    }


    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }


    /// Consumes the writer and returns the text.
    pub fn into_string(self) -> String {
        self.buf
    }
}


/// A cursor over exported parameters.
/// Each call removes one token from the front of the remaining text.
#[derive(Debug, Clone)]
pub struct ParamReader<'a> {
    rest: &'a str,
}


impl<'a> ParamReader<'a> {
    /// Construct a reader positioned at the start of `params`.
    pub fn new(params: &'a str) -> Self {
        Self { rest: params }
    }


    /// Remove and return the token up to the next `delim`.
    /// The delimiter itself is consumed as well.
    pub fn token(&mut self, field: &'static str, delim: char)
        -> Result<&'a str>
    {
        let pos = self.rest.find(delim)
            .ok_or(BoostError::MissingToken { field, delim })?;

        let token = &self.rest[..pos];
        self.rest = &self.rest[pos + delim.len_utf8()..];
        Ok(token)
    }


    /// Remove the next token and parse it.
    pub fn parse<T: FromStr>(&mut self, field: &'static str, delim: char)
        -> Result<T>
    {
        let token = self.token(field, delim)?;
        token.trim()
            .parse::<T>()
            .map_err(|_| BoostError::InvalidToken {
                field,
                token: token.to_string(),
            })
    }


    /// Read a weak learner field.
    #[inline]
    pub fn field<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        self.parse(field, WEAK_LEARNER_DELIM)
    }


    /// Read `len` consecutive weak learner fields.
    pub fn fields<T: FromStr>(&mut self, field: &'static str, len: usize)
        -> Result<Vec<T>>
    {
        let mut values = Vec::new();
        for _ in 0..len {
            values.push(self.field(field)?);
        }
        Ok(values)
    }


    /// Read a count terminated by `delim` that announces
    /// `width` further `delim`-terminated fields per item.
    /// Fails unless that many fields are left to read,
    /// so a count never reserves more than the text can hold.
    pub fn length(&mut self, field: &'static str, width: usize, delim: char)
        -> Result<usize>
    {
        let token = self.token(field, delim)?;
        let invalid = || BoostError::InvalidToken {
            field,
            token: token.to_string(),
        };

        let len = token.trim()
            .parse::<usize>()
            .map_err(|_| invalid())?;
        let n_fields = len.checked_mul(width)
            .ok_or_else(invalid)?;
        if n_fields > self.remaining().matches(delim).count() {
            return Err(invalid());
        }
        Ok(len)
    }


    /// Read an ensemble-level field.
    #[inline]
    pub fn entry<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        self.parse(field, ENSEMBLE_DELIM)
    }


    /// Read an ensemble-level field without parsing it.
    /// Used to cut out a complete weak learner blob.
    #[inline]
    pub fn raw_entry(&mut self, field: &'static str) -> Result<&'a str> {
        self.token(field, ENSEMBLE_DELIM)
    }


    /// Returns the text not consumed yet.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }


    /// Returns `true` if every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }


    /// Fails if anything but whitespace is left.
    pub fn finish(self) -> Result<()> {
        let rest = self.rest.trim();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(BoostError::TrailingParams(rest.len()))
        }
    }
}
