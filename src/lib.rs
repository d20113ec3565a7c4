//! # BASIC Parse
//!
//! A parser for the classic line-numbered BASIC dialect used by programs
//! like Super Star Trek. Source text goes in, a lazy sequence of structured
//! statement records comes out, one per numbered source line.
//!
//! This crate only parses syntax into records. It is not an interpreter;
//! nothing is evaluated or executed.

pub mod lang;
