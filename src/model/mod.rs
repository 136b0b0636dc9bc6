/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP request executor, base URL normalization and status mapping
pub mod http;
/// Typed accessors over host-resolved parameters
pub mod params;
/// Request descriptors and workflow items
pub mod requests;
/// Validators and response projection
pub mod utils;
