pub mod list_principals_query;
