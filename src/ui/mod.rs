// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks.

pub mod design_tokens;
