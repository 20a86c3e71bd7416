//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap Icons so components never name a
//! concrete icon set.

use icondata::Icon;

pub const HOME: Icon = icondata::BsHouseFill;
pub const SEARCH: Icon = icondata::BsSearch;
pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const ARROW_LEFT: Icon = icondata::BsArrowLeft;
pub const ARROW_RIGHT: Icon = icondata::BsArrowRight;
pub const WARNING: Icon = icondata::BsExclamationTriangle;
pub const RETRY: Icon = icondata::BsArrowClockwise;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;
