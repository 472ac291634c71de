// ABOUTME: Re-exports command modules for cyride-cli
// ABOUTME: Provides access to batch processing and single-activity inspection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

pub mod inspect;
pub mod process;
