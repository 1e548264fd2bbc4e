use crate::app::api::{self, DetailsView};

pub fn run_details(section: bool) {
    let view = if section { DetailsView::Section } else { DetailsView::List };
    print!("{}", api::details(view));
    if !section {
        println!();
    }
}
