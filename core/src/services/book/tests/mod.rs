//! Tests for book service
