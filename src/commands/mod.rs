pub mod build_tree;
pub mod distribution;
pub mod extract_rrna;
pub mod size_filter;
