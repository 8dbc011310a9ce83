#![allow(dead_code)]

use std::path::{Path, PathBuf};

use varpair_core::{Ast, CollectedFunction, FunctionBuilder, Location, TypeInfo, Variable};

/// A collected pair whose debug side has user names only when `user` is set.
pub fn sample_function(name: &str, address: u64, user: bool) -> CollectedFunction {
    let int = TypeInfo::sized("int", 4);
    let debug = FunctionBuilder::new(name, int.clone())
        .address(address)
        .argument(Location::register("rdi"), Variable::new("count", int.clone(), user))
        .local(Location::stack(-0x14), Variable::new("i", int.clone(), user))
        .build();
    let decompiler = FunctionBuilder::new(format!("sub_{address:x}"), TypeInfo::new("undefined4"))
        .address(address)
        .argument(Location::register("rdi"), Variable::new("param_1", int.clone(), false))
        .local(Location::stack(-0x14), Variable::new("local_14", int, false))
        .build();
    CollectedFunction::new(Ast::empty(), debug, decompiler, format!("undefined4 sub_{address:x}(void)"))
}

/// Write `functions` as a JSON array into `dir` and return the path.
pub fn write_fixture(dir: &Path, functions: &[CollectedFunction]) -> PathBuf {
    let path = dir.join("collected.json");
    std::fs::write(&path, serde_json::to_string_pretty(functions).unwrap()).unwrap();
    path
}
