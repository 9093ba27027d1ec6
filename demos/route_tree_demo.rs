//! Route Tree Demo
//!
//! Compiles a small application route tree and prints the client URLs and
//! router templates derived from it. Run with `RUST_LOG=debug` to see the
//! compilation logging.

use route_tree::{compile, RouteTree, Segment};

fn main() {
    env_logger::init();

    let tree = RouteTree::new().route(
        "app",
        Segment::new()
            .sub_route("dashboard", Segment::new())
            .sub_route(
                "users",
                Segment::new().sub_route(
                    "$userId",
                    Segment::new()
                        .sub_route("profile", Segment::new())
                        .sub_route("settings", Segment::new().segment_name("preferences")),
                ),
            )
            .sub_route(
                "admin",
                Segment::new()
                    .parent()
                    .sub_route("audit", Segment::new())
                    .sub_route("roles", Segment::new()),
            ),
    );

    let api = compile(&tree).expect("route tree has no reserved keys");

    let app = api.client.route("app").expect("app route exists");
    println!("client URLs:");
    println!("  {}", app.route("dashboard").unwrap().resolve());
    let user = app.route("users").unwrap().param("$userId").unwrap().bind(42);
    println!("  {}", user.resolve());
    println!("  {}", user.route("profile").unwrap().resolve());
    println!("  {}", user.route("settings").unwrap().resolve());

    let app = api.router.route("app").expect("app route exists");
    println!("router templates:");
    println!("  {}", app.template());
    let users = app.route("users").unwrap();
    println!("  {}", users.route("$userId").unwrap().template());
    let admin = app.route("admin").unwrap();
    println!("  {}", admin.template());
    println!("  {}", admin.route("audit").unwrap().template());
    println!("  {}", admin.route("roles").unwrap().template());

    println!("parameters:");
    for (key, name) in api.params.iter() {
        println!("  {key} -> {name}");
    }
}
