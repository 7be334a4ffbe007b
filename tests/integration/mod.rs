// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod helpers;
pub mod page_test;
pub mod schema_test;
pub mod site_test;
pub mod user_test;
