mod tables;

pub use tables::{
    format_join_summary, format_split_summary, format_structure_report, print_join_summary,
    print_split_summary, print_structure_report,
};
