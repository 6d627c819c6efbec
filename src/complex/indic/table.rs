// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indic syllabic category and positional class data.
//!
//! Each entry packs the positional class in the high byte and the syllabic
//! category in the low byte.

#![allow(clippy::unreadable_literal)]

use super::{category, position};

/// Packed value of characters outside the table.
const OTHER: u16 = (position::END as u16) << 8 | category::X as u16;

const OFFSET_0X0028: usize = 0;
const OFFSET_0X00B0: usize = 24;
const OFFSET_0X0900: usize = 64;
const OFFSET_0X1000: usize = 1328;
const OFFSET_0X1780: usize = 1480;
const OFFSET_0X1CD0: usize = 1584;
const OFFSET_0X2008: usize = 1624;
const OFFSET_0X2070: usize = 1632;
const OFFSET_0XA8E0: usize = 1656;
const OFFSET_0XA9E0: usize = 1680;
const OFFSET_0XAA60: usize = 1704;

#[rustfmt::skip]
static TABLE: [u16; 1728] = [
    // Basic Latin
    0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf0b, 0xf00, 0xf00,
    /* 0030 */ 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Latin-1 Supplement

    /* 00B0 */ 0xf00, 0xf00, 0xf08, 0xf08, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 00C0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 00D0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf0b,

    // Devanagari

    /* 0900 */ 0xf08, 0xf08, 0xf08, 0xf08, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02,
    /* 0910 */ 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0920 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0930 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0x607, 0xb07, 0xf03, 0xf12, 0xb07, 0x307,
    /* 0940 */ 0xb07, 0x807, 0x807, 0x807, 0x807, 0x607, 0x607, 0x607, 0x607, 0xb07, 0xb07, 0xb07, 0xb07, 0x804, 0x307, 0xb07,
    /* 0950 */ 0xf00, 0xf0a, 0xf0a, 0xf00, 0xf00, 0x607, 0x807, 0x807, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0960 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0970 */ 0xf00, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,

    // Bengali

    /* 0980 */ 0xf0b, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xf02,
    /* 0990 */ 0xf02, 0xf00, 0xf00, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 09A0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 09B0 */ 0xf01, 0xf00, 0xf01, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf03, 0xf12, 0xb07, 0x307,
    /* 09C0 */ 0xb07, 0x807, 0x807, 0x807, 0x807, 0xf00, 0xf00, 0x307, 0x307, 0xf00, 0xf00, 0xb07, 0xb07, 0x804, 0xf01, 0xf00,
    /* 09D0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xb07, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01,
    /* 09E0 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 09F0 */ 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf08, 0xf00, 0xf08, 0xf00,

    // Gurmukhi

    /* 0A00 */ 0xf00, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xf00, 0xf00, 0xf02,
    /* 0A10 */ 0xf02, 0xf00, 0xf00, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0A20 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0A30 */ 0xf01, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf00, 0xf00, 0xf03, 0xf00, 0xb07, 0x307,
    /* 0A40 */ 0xb07, 0x807, 0x807, 0xf00, 0xf00, 0xf00, 0xf00, 0x607, 0x607, 0xf00, 0xf00, 0x607, 0x607, 0x804, 0xf00, 0xf00,
    /* 0A50 */ 0xf00, 0xf0a, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf00,
    /* 0A60 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0A70 */ 0xf08, 0x608, 0xf0b, 0xf0b, 0xf00, 0x811, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Gujarati

    /* 0A80 */ 0xf00, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf02,
    /* 0A90 */ 0xf02, 0xf02, 0xf00, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0AA0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0AB0 */ 0xf01, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf03, 0xf12, 0xb07, 0x307,
    /* 0AC0 */ 0xb07, 0x807, 0x807, 0x807, 0x807, 0x607, 0xf00, 0x607, 0x607, 0xb07, 0xf00, 0xb07, 0xb07, 0x804, 0xf00, 0xf00,
    /* 0AD0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 0AE0 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0AF0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf0a, 0xf0a, 0xf0a, 0xf03, 0xf03, 0xf03,
    /* 0B00 */ 0xf00, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02,

    // Oriya
    0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xf02,
    /* 0B10 */ 0xf02, 0xf00, 0xf00, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0B20 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0B30 */ 0xf01, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf03, 0xf12, 0xb07, 0x607,
    /* 0B40 */ 0xb07, 0x807, 0x807, 0x807, 0x807, 0xf00, 0xf00, 0x307, 0x607, 0xf00, 0xf00, 0xb07, 0xb07, 0x804, 0xf00, 0xf00,
    /* 0B50 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0x607, 0x607, 0xb07, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01,
    /* 0B60 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0B70 */ 0xf00, 0xf01, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Tamil

    /* 0B80 */ 0xf00, 0xf00, 0xf08, 0xf00, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xf00, 0xf02, 0xf02,
    /* 0B90 */ 0xf02, 0xf00, 0xf02, 0xf02, 0xf02, 0xf01, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf00, 0xf01, 0xf00, 0xf01, 0xf01,
    /* 0BA0 */ 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01,
    /* 0BB0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf00, 0xb07, 0xb07,
    /* 0BC0 */ 0x607, 0xb07, 0xb07, 0xf00, 0xf00, 0xf00, 0x307, 0x307, 0x307, 0xf00, 0xb07, 0xb07, 0xb07, 0x604, 0xf00, 0xf00,
    /* 0BD0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xb07, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 0BE0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0BF0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Telugu

    /* 0C00 */ 0xf08, 0xf08, 0xf08, 0xf08, 0xf08, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf02, 0xf02,
    /* 0C10 */ 0xf02, 0xf00, 0xf02, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0C20 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0C30 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf12, 0x607, 0x607,
    /* 0C40 */ 0x607, 0xb07, 0xb07, 0xb07, 0xb07, 0xf00, 0x607, 0x607, 0x807, 0xf00, 0x607, 0x607, 0x607, 0x604, 0xf00, 0xf00,
    /* 0C50 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0x607, 0x807, 0xf00, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 0C60 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0C70 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Kannada

    /* 0C80 */ 0xf08, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf02, 0xf02,
    /* 0C90 */ 0xf02, 0xf00, 0xf02, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0CA0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0CB0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf03, 0xf12, 0xb07, 0x607,
    /* 0CC0 */ 0xb07, 0xb07, 0xb07, 0xb07, 0xb07, 0xf00, 0x607, 0xb07, 0xb07, 0xf00, 0xb07, 0xb07, 0x607, 0x604, 0xf00, 0xf00,
    /* 0CD0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xb07, 0xb07, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf00,
    /* 0CE0 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0CF0 */ 0xf00, 0xf13, 0xf13, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,

    // Malayalam

    /* 0D00 */ 0xf08, 0xf08, 0xf08, 0xf08, 0xf08, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf02, 0xf02,
    /* 0D10 */ 0xf02, 0xf00, 0xf02, 0xf02, 0xf02, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0D20 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0D30 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf07, 0xf07, 0xf12, 0xb07, 0xb07,
    /* 0D40 */ 0xb07, 0xb07, 0xb07, 0x807, 0x807, 0xf00, 0x307, 0x307, 0x307, 0xf00, 0xb07, 0xb07, 0xb07, 0x604, 0xf0f, 0xf00,
    /* 0D50 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xb07, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf02,
    /* 0D60 */ 0xf02, 0xf02, 0x807, 0x807, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,
    /* 0D70 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0D80 */ 0xf00, 0xf08, 0xf08, 0xf08, 0xf00, 0xf02, 0xf02, 0xf02,

    // Sinhala
    0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02,
    /* 0D90 */ 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0DA0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 0DB0 */ 0xf01, 0xf01, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf01, 0xf00, 0xf00,
    /* 0DC0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf00, 0xf00, 0xf00, 0x604, 0xf00, 0xf00, 0xf00, 0xf00, 0xb07,
    /* 0DD0 */ 0xb07, 0xb07, 0x607, 0x607, 0x807, 0xf00, 0x807, 0xf00, 0xb07, 0x307, 0x607, 0x307, 0xb07, 0xb07, 0xb07, 0xb07,
    /* 0DE0 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,

    // Myanmar

    /* 1000 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 1010 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 1020 */ 0xf01, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xb07, 0xb07, 0x607, 0x607, 0x807,
    /* 1030 */ 0x807, 0x307, 0x607, 0x607, 0x607, 0x607, 0xf08, 0xf03, 0xf08, 0xf0e, 0xf07, 0xb11, 0x811, 0x811, 0x811, 0xf01,
    /* 1040 */ 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf00, 0xf0b, 0xf00, 0xf00, 0xf0b, 0xf00,
    /* 1050 */ 0xf01, 0xf01, 0xf02, 0xf02, 0xf02, 0xf02, 0xb07, 0xb07, 0x807, 0x807, 0xf01, 0xf01, 0xf01, 0xf01, 0x811, 0x811,
    /* 1060 */ 0x811, 0xf01, 0xb07, 0xf03, 0xf03, 0xf01, 0xf01, 0xb07, 0xb07, 0xf03, 0xf03, 0xf03, 0xf03, 0xf03, 0xf01, 0xf01,
    /* 1070 */ 0xf01, 0x607, 0x607, 0x607, 0x607, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 1080 */ 0xf01, 0xf01, 0x811, 0xb07, 0x307, 0x607, 0x607, 0xf03, 0xf03, 0xf03, 0xf03, 0xf03, 0xf03, 0xf03, 0xf01, 0xf03,
    /* 1090 */ 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,

    // Khmer

    /* 1780 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 1790 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* 17A0 */ 0xf01, 0xf01, 0xf01, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02, 0xf02,
    /* 17B0 */ 0xf02, 0xf02, 0xf02, 0xf02, 0xf00, 0xf00, 0xb07, 0x607, 0x607, 0x607, 0x607, 0x807, 0x807, 0x807, 0x607, 0xb07,
    /* 17C0 */ 0xb07, 0x307, 0x307, 0x307, 0xb07, 0xb07, 0xf08, 0xf08, 0xb07, 0x60d, 0x60d, 0xf08, 0x611, 0xf07, 0xf08, 0xf08,
    /* 17D0 */ 0xf08, 0xf07, 0xf0e, 0xf08, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf12, 0xf08, 0xf00, 0xf00,
    /* 17E0 */ 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,

    // Vedic Extensions

    /* 1CD0 */ 0xf0a, 0xf0a, 0xf0a, 0xf00, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a,
    /* 1CE0 */ 0xf0a, 0xf0a, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 1CF0 */ 0xf00, 0xf00, 0xf01, 0xf01, 0xf0a, 0xf13, 0xf13, 0xf0a,

    // General Punctuation
    0xf00, 0xf00, 0xf00, 0xf00, 0xf05, 0xf06, 0xf00, 0xf00,

    // Superscripts and Subscripts

    /* 2070 */ 0xf00, 0xf00, 0xf00, 0xf00, 0xf08, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00, 0xf00,
    /* 2080 */ 0xf00, 0xf00, 0xf08, 0xf08, 0xf08, 0xf00, 0xf00, 0xf00,

    // Devanagari Extended

    /* A8E0 */ 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a, 0xf0a,
    /* A8F0 */ 0xf0a, 0xf0a, 0xf08, 0xf08, 0xf00, 0xf00, 0xf00, 0xf00,

    // Myanmar Extended-B

    /* A9E0 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0x607, 0xf00, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* A9F0 */ 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b, 0xf0b,

    // Myanmar Extended-A

    /* AA60 */ 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01, 0xf01,
    /* AA70 */ 0xf00, 0xf01, 0xf01, 0xf01, 0xf0b, 0xf0b, 0xf0b, 0xf00,
];

/// Returns the packed `(position << 8) | category` value for `u`.
pub(crate) fn get_categories(u: u32) -> u16 {
    match u >> 12 {
        0x0 => {
            if u == 0x00A0 {
                return 0x0F0B;
            }
            if (0x0028..=0x003F).contains(&u) {
                return TABLE[u as usize - 0x0028 + OFFSET_0X0028];
            }
            if (0x00B0..=0x00D7).contains(&u) {
                return TABLE[u as usize - 0x00B0 + OFFSET_0X00B0];
            }
            if (0x0900..=0x0DEF).contains(&u) {
                return TABLE[u as usize - 0x0900 + OFFSET_0X0900];
            }
        }
        0x1 => {
            if (0x1000..=0x1097).contains(&u) {
                return TABLE[u as usize - 0x1000 + OFFSET_0X1000];
            }
            if (0x1780..=0x17E7).contains(&u) {
                return TABLE[u as usize - 0x1780 + OFFSET_0X1780];
            }
            if (0x1CD0..=0x1CF7).contains(&u) {
                return TABLE[u as usize - 0x1CD0 + OFFSET_0X1CD0];
            }
        }
        0x2 => {
            if u == 0x25CC {
                return 0x0F0B;
            }
            if (0x2008..=0x200F).contains(&u) {
                return TABLE[u as usize - 0x2008 + OFFSET_0X2008];
            }
            if (0x2070..=0x2087).contains(&u) {
                return TABLE[u as usize - 0x2070 + OFFSET_0X2070];
            }
        }
        0xA => {
            if (0xA8E0..=0xA8F7).contains(&u) {
                return TABLE[u as usize - 0xA8E0 + OFFSET_0XA8E0];
            }
            if (0xA9E0..=0xA9F7).contains(&u) {
                return TABLE[u as usize - 0xA9E0 + OFFSET_0XA9E0];
            }
            if (0xAA60..=0xAA77).contains(&u) {
                return TABLE[u as usize - 0xAA60 + OFFSET_0XAA60];
            }
        }
        _ => {}
    }
    OTHER
}

#[cfg(test)]
mod test {
    use super::get_categories;

    #[test]
    fn devanagari_entries() {
        // KA: base consonant
        assert_eq!(get_categories(0x0915), 0x0F01);
        // virama: halant, below
        assert_eq!(get_categories(0x094D), 0x0804);
        // sign I: pre-base matra
        assert_eq!(get_categories(0x093F), 0x0307);
    }

    #[test]
    fn outside_ranges() {
        assert_eq!(get_categories('a' as u32), 0x0F00);
        assert_eq!(get_categories(0x25CC), 0x0F0B);
        assert_eq!(get_categories(0x00A0), 0x0F0B);
        assert_eq!(get_categories(0x10FFFF), 0x0F00);
    }

    #[test]
    fn joiners() {
        assert_eq!(get_categories(0x200C) & 0xFF, 5);
        assert_eq!(get_categories(0x200D) & 0xFF, 6);
    }
}
