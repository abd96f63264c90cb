// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod encode;
pub mod inspect;
pub mod pack;
pub mod predict;
pub mod vhash;
pub mod verify;
