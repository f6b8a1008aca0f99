//! Tabulated solutions at 20 °C.
//!
//! Columns: density (g/mL), mass fraction, mass concentration (g/mL),
//! volume fraction.  The end rows are pinned to the reference densities
//! in [`crate::measure`] so that a pure-water row is shared by both tables.

use super::table::{Row, Table};
use crate::measure::Family;

/// Ethanol–water, 5 % w/w steps.
pub static ALCOHOL: Table = Table::new(Family::Alcohol, ALCOHOL_ROWS);

/// Sucrose–water, 5 % w/w steps.
pub static SUGAR: Table = Table::new(Family::Sugar, SUGAR_ROWS);

const ALCOHOL_ROWS: &[Row] = &[
    Row::new(0.78816, 1.00, 0.788160, 1.000000),
    Row::new(0.80424, 0.95, 0.764028, 0.969382),
    Row::new(0.81797, 0.90, 0.736173, 0.934040),
    Row::new(0.83095, 0.85, 0.706307, 0.896147),
    Row::new(0.84344, 0.80, 0.674752, 0.856110),
    Row::new(0.85564, 0.75, 0.641730, 0.814213),
    Row::new(0.86766, 0.70, 0.607362, 0.770607),
    Row::new(0.87948, 0.65, 0.571662, 0.725312),
    Row::new(0.89113, 0.60, 0.534678, 0.678388),
    Row::new(0.90258, 0.55, 0.496419, 0.629845),
    Row::new(0.91384, 0.50, 0.456920, 0.579730),
    Row::new(0.92472, 0.45, 0.416124, 0.527969),
    Row::new(0.93518, 0.40, 0.374072, 0.474614),
    Row::new(0.94494, 0.35, 0.330729, 0.419622),
    Row::new(0.95382, 0.30, 0.286146, 0.363056),
    Row::new(0.96168, 0.25, 0.240420, 0.305040),
    Row::new(0.96864, 0.20, 0.193728, 0.245798),
    Row::new(0.97514, 0.15, 0.146271, 0.185585),
    Row::new(0.98187, 0.10, 0.098187, 0.124577),
    Row::new(0.98938, 0.05, 0.049469, 0.062765),
    Row::new(0.99800, 0.00, 0.000000, 0.000000),
];

const SUGAR_ROWS: &[Row] = &[
    Row::new(0.99800, 0.00, 0.000000, 0.000000),
    Row::new(1.01785, 0.05, 0.050893, 0.032091),
    Row::new(1.03814, 0.10, 0.103814, 0.065461),
    Row::new(1.05917, 0.15, 0.158875, 0.100180),
    Row::new(1.08096, 0.20, 0.216192, 0.136321),
    Row::new(1.10356, 0.25, 0.275890, 0.173964),
    Row::new(1.12698, 0.30, 0.338094, 0.213187),
    Row::new(1.15128, 0.35, 0.402948, 0.254082),
    Row::new(1.17645, 0.40, 0.470580, 0.296727),
    Row::new(1.20255, 0.45, 0.541148, 0.341224),
    Row::new(1.22957, 0.50, 0.614785, 0.387657),
    Row::new(1.25754, 0.55, 0.691647, 0.436123),
    Row::new(1.28646, 0.60, 0.771876, 0.486712),
    Row::new(1.31633, 0.65, 0.855615, 0.539514),
    Row::new(1.34717, 0.70, 0.943019, 0.594627),
    Row::new(1.37897, 0.75, 1.034228, 0.652139),
    Row::new(1.41173, 0.80, 1.129384, 0.712141),
    Row::new(1.44545, 0.85, 1.228632, 0.774723),
    Row::new(1.48000, 0.90, 1.332000, 0.839902),
    Row::new(1.53000, 0.95, 1.453500, 0.916514),
    Row::new(1.58590, 1.00, 1.585900, 1.000000),
];
