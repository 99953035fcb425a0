//! Edge case tests for alecci-lex
