// Fixture generators shared by the benches. Each bench target compiles this
// module separately and uses only part of it.
#[allow(dead_code)]
pub fn generate_notebook(cells: usize) -> String {
    let base = "# %% Load\nimport os\nfor f in os.listdir('.'):\n\tprint(f)\n\n# %% [markdown]\n# Notes\nSome text.\n\n";
    base.repeat(cells)
}

#[allow(dead_code)]
pub fn generate_source(blocks: usize) -> String {
    let base = "fn example(a: u32, b: u32) -> u32 {\n\tlet total = a + b;\n\tif total > 10 {\n\t\treturn \"大きい\".len() as u32;\n\t}\n\ttotal\n}\n\n";
    base.repeat(blocks)
}
