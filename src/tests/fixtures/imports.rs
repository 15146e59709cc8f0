// Import documents for the Monday 2024-03-04 scenario.
//
// march.csv: E-1001 full day (added), E-2002 09:00-12:00 (added), E-1001 again (duplicate).
// march.xml: E-1001 full day (added), E-2002 08:00-17:00 (outside window), E-9999 (unknown).

pub const MONDAY_CSV: &str = include_str!("files/march.csv");
pub const MONDAY_XML: &str = include_str!("files/march.xml");
