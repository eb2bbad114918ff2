pub mod crew_lookup;
