mod print_nothing_for_an_empty_working_tree;
mod report_files_by_classification;
mod status_before_init_is_rejected;
