mod mock_query_facility;

pub use mock_query_facility::MockQueryFacility;
