#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use mx_access as access;
pub use mx_reflect as reflect;
pub use mx_utils as utils;
