#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use dq_reflect as reflect;
pub use dq_surf as surf;
