fn main() {
    env_logger::init();
    elastic_particles::app::run();
}
