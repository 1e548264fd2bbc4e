pub mod joiners;
