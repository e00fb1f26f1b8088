pub mod check_tool_access_query;
