mod add_before_init_is_rejected;
mod add_files_to_index_successfully;
mod adding_a_non_existent_file_is_rejected;
mod missing_argument_is_a_usage_error;
mod symlinks_are_staged_under_their_own_name;
