fn main() { spgen_tasks::entry_points::spgen_crystal() }
