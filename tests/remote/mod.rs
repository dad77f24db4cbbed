mod clone_with_an_invalid_link_is_rejected;
mod set_origin;
mod set_token;
