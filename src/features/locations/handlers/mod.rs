pub mod location_handler;

pub use location_handler::{
    __path_list_counties, __path_list_districts, __path_list_parishes, __path_list_sub_counties,
    __path_list_villages, __path_search_districts, list_counties, list_districts, list_parishes,
    list_sub_counties, list_villages, search_districts,
};
