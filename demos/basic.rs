#![allow(clippy::print_stdout, clippy::expect_used)]

use qurl::{Qurl, Value};

fn main() {
    // Token form, as a template tag would pass it
    let url = qurl::qurl("http://sophilabs.com/?a=1", ["a+=\"2\"", "a-=\"1\"", "page++"])
        .expect("Failed to edit URL");
    println!("tokens:  {url}"); // http://sophilabs.com/?a=2&page=1

    // Chained methods
    let url = Qurl::parse("http://sophilabs.com/?a=1&q=some+thing")
        .expect("Failed to parse URL")
        .set("a", 2)
        .set("b", 1)
        .replace("q", "some")
        .inc("page", 1);
    println!("chained: {url}"); // http://sophilabs.com/?q=thing&a=2&b=1&page=1

    // Null removes a key
    let url = url.set("q", Value::Null).dec("page", 1);
    println!("removed: {url}"); // http://sophilabs.com/?a=2&b=1&page=0
    println!("page:    {:?}", url.get("page")); // Some("0")
}
