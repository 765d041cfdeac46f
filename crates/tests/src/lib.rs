#[cfg(test)]
mod common;

#[cfg(test)]
mod search_flow_tests;

#[cfg(test)]
mod query_preview_tests;

#[cfg(test)]
mod synonyms_tests;

#[cfg(test)]
mod refinements_tests;

#[cfg(test)]
mod recommendations_tests;

#[cfg(test)]
mod console_tests;
