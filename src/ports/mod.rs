mod fragment_joiner;

pub use fragment_joiner::FragmentJoiner;
