fn main() {
    println!("{}", relay_graph_server::graphql::schema(None).sdl().trim());
}
