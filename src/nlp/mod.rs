//! Natural Language Processing components
//!
//! This module provides tokenization and the sentiment lexicon.

pub mod lexicon;
pub mod tokenizer;
