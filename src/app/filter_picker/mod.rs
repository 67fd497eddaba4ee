// SPDX-License-Identifier: GPL-3.0-only

//! Filter picker context drawer

mod view;
