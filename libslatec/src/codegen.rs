// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `codegen` module renders the optimized TAC, together with the original AST, into C++
//! source text.
//!
//! The AST supplies what the flat TAC stream cannot: function parameter lists and the declared
//! types of named variables. Function bodies are recovered from the stream via the
//! `func_<name>` / `endfunc_<name>` label pairs the IR generator emits.

pub mod builtins;


use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Write as _;

use crate::ir::{is_bool_literal, is_int_literal, is_quoted_string, is_temp, TacInstruction};
use crate::parser::{Block, Declaration, DeclaredType, FunctionDecl, Program, Statement, UnaryOp};

/// Generates C++ source for the given TAC and program.
pub fn generate(tac: &[TacInstruction], program: &Program) -> String {
    CodeGenerator::new(tac, program).generate()
}

/// A function's half-open instruction range `[start, end)` within the TAC stream.
struct FunctionRange {
    name: String,
    start: usize,
    end: usize,
}

struct CodeGenerator<'a> {
    tac: &'a [TacInstruction],
    program: &'a Program,

    // Declared types for every named variable and parameter in the program, so a name's first
    // assignment can declare it with the right C++ type.
    var_types: HashMap<String, DeclaredType>,

    // Names already declared in the function (or main) currently being emitted.
    declared: HashSet<String>,

    out: String,
}

impl<'a> CodeGenerator<'a> {
    fn new(tac: &'a [TacInstruction], program: &'a Program) -> Self {
        Self { tac, program, var_types: HashMap::new(), declared: HashSet::new(), out: String::new() }
    }

    fn generate(mut self) -> String {
        self.collect_var_types();

        self.out.push_str("#include <iostream>\n");
        self.out.push_str("#include <string>\n");
        self.out.push_str("#include <cmath>\n");
        self.out.push_str("using namespace std;\n\n");

        self.emit_used_builtins();

        let ranges = self.function_ranges();

        // Forward declarations. Every function is emitted as returning int regardless of its
        // inferred Slate return type.
        for range in &ranges {
            let params = self.find_function_decl(&range.name).map(render_params).unwrap_or_default();
            let _ = writeln!(self.out, "int {}({});", range.name, params);
        }
        self.out.push('\n');

        for range in &ranges {
            self.emit_function(range);
        }

        self.emit_main(&ranges);
        self.out
    }

    /// Records the declared type of every named variable in the program: top-level variables,
    /// function parameters, and block-scope locals.
    fn collect_var_types(&mut self) {
        fn walk_block(block: &Block, types: &mut HashMap<String, DeclaredType>) {
            for stmt in &block.statements {
                walk_statement(stmt, types);
            }
        }

        fn walk_statement(stmt: &Statement, types: &mut HashMap<String, DeclaredType>) {
            match stmt {
                Statement::VarDecl(var_decl) => {
                    types.insert(var_decl.name.clone(), var_decl.declared_type);
                }
                Statement::If { then_block, else_block, .. } => {
                    walk_block(then_block, types);
                    if let Some(else_block) = else_block {
                        walk_block(else_block, types);
                    }
                }
                Statement::While { block, .. } | Statement::For { block, .. } => walk_block(block, types),
                Statement::Block(block) => walk_block(block, types),
                _ => {}
            }
        }

        for decl in &self.program.declarations {
            match decl {
                Declaration::Variable(var_decl) => {
                    self.var_types.insert(var_decl.name.clone(), var_decl.declared_type);
                }
                Declaration::Function(func) => {
                    for param in &func.params {
                        self.var_types.insert(param.name.clone(), param.declared_type);
                    }
                    walk_block(&func.body, &mut self.var_types);
                }
                Declaration::Statement(stmt) => walk_statement(stmt, &mut self.var_types),
            }
        }
    }

    /// Emits the builtin routines whose names appear as call targets, skipping any the user
    /// redeclared as a function.
    fn emit_used_builtins(&mut self) {
        let mut used = HashSet::new();
        for instr in self.tac {
            if let TacInstruction::Call { callee, .. } = instr {
                used.insert(callee.as_str());
            }
        }

        for (name, code) in builtins::BUILTIN_ROUTINES {
            if used.contains(name) && self.find_function_decl(name).is_none() {
                self.out.push_str(code);
            }
        }
        self.out.push('\n');
    }

    fn find_function_decl(&self, name: &str) -> Option<&'a FunctionDecl> {
        self.program.declarations.iter().find_map(|decl| match decl {
            Declaration::Function(func) if func.name == name => Some(func),
            _ => None,
        })
    }

    /// Locates each function's instruction range in the TAC stream.
    fn function_ranges(&self) -> Vec<FunctionRange> {
        let mut ranges = Vec::new();

        for (index, instr) in self.tac.iter().enumerate() {
            let Some(label) = instr.label_name() else { continue };
            let Some(name) = label.strip_prefix("func_") else { continue };

            let start = index + 1;
            ranges.push(FunctionRange { name: name.to_string(), start, end: self.find_function_end(name, start) });
        }

        ranges
    }

    /// Finds the end of a function's range: one past its `endfunc_<name>` label, falling back to
    /// one past the first `return`, then to the next `func_*` label or the end of the stream.
    fn find_function_end(&self, name: &str, start: usize) -> usize {
        let end_label = format!("endfunc_{name}");
        for (offset, instr) in self.tac[start..].iter().enumerate() {
            if instr.label_name() == Some(end_label.as_str()) {
                return start + offset + 1;
            }
        }

        for (offset, instr) in self.tac[start..].iter().enumerate() {
            if matches!(instr.label_name(), Some(label) if label.starts_with("func_")) {
                return start + offset;
            }
            if matches!(instr, TacInstruction::Return { .. }) {
                return start + offset + 1;
            }
        }

        self.tac.len()
    }

    fn emit_function(&mut self, range: &FunctionRange) {
        let func_decl = self.find_function_decl(&range.name);
        let params = func_decl.map(render_params).unwrap_or_default();
        let _ = writeln!(self.out, "int {}({}) {{", range.name, params);

        self.declared.clear();
        if let Some(func_decl) = func_decl {
            for param in &func_decl.params {
                self.declared.insert(param.name.clone());
            }
        }

        self.declare_temps(range.start, range.end);

        let tac = self.tac;
        for instr in &tac[range.start..range.end.min(tac.len())] {
            self.translate_instruction(instr);
        }

        self.out.push_str("    return 0;\n");
        self.out.push_str("}\n\n");
    }

    fn emit_main(&mut self, ranges: &[FunctionRange]) {
        self.out.push_str("int main() {\n");
        self.declared.clear();

        // Pre-declare the top-level named variables with default values.
        for decl in &self.program.declarations {
            if let Declaration::Variable(var_decl) = decl {
                let _ = writeln!(
                    self.out,
                    "    {} {} = {};",
                    cpp_type_for(var_decl.declared_type),
                    var_decl.name,
                    default_value_for_cpp_type(cpp_type_for(var_decl.declared_type))
                );
                self.declared.insert(var_decl.name.clone());
            }
        }

        let in_function = |index: usize| ranges.iter().any(|range| index >= range.start && index < range.end);

        // Declare the temporaries used by top-level code.
        let mut temps = BTreeSet::new();
        for (index, instr) in self.tac.iter().enumerate() {
            if in_function(index) {
                continue;
            }
            collect_temps(instr, &mut temps);
        }
        for temp in &temps {
            let temp_type = self.decide_temp_type(temp, 0, self.tac.len());
            let _ = writeln!(self.out, "    {} {} = {};", temp_type, temp, default_value_for_cpp_type(temp_type));
            self.declared.insert(temp.clone());
        }

        let tac = self.tac;
        for (index, instr) in tac.iter().enumerate() {
            if in_function(index) {
                continue;
            }
            self.translate_instruction(instr);
        }

        self.out.push_str("    return 0;\n");
        self.out.push_str("}\n");
    }

    /// Declares every temporary used inside the given range, each with a type inferred from its
    /// uses and a matching default value.
    fn declare_temps(&mut self, start: usize, end: usize) {
        let mut temps = BTreeSet::new();
        for instr in &self.tac[start..end.min(self.tac.len())] {
            collect_temps(instr, &mut temps);
        }

        for temp in &temps {
            let temp_type = self.decide_temp_type(temp, start, end);
            let _ = writeln!(self.out, "    {} {} = {};", temp_type, temp, default_value_for_cpp_type(temp_type));
            self.declared.insert(temp.clone());
        }
    }

    /// Decides the C++ type for a temporary by scanning its uses in `[start, end)`.
    ///
    /// A string literal or string variable operand makes it a string; otherwise a boolean
    /// operator or bool operand makes it a bool; otherwise it is an int.
    fn decide_temp_type(&self, temp: &str, start: usize, end: usize) -> &'static str {
        let mut seen_string = false;
        let mut seen_bool = false;

        for instr in &self.tac[start..end.min(self.tac.len())] {
            let mentions = instr.dest() == Some(temp) || instr.operands().contains(&temp);
            if !mentions {
                continue;
            }

            let is_bool_op = match instr {
                TacInstruction::Binary { op, .. } => op.produces_bool(),
                TacInstruction::Unary { op: UnaryOp::Not, .. } => true,
                _ => false,
            };
            if is_bool_op {
                seen_bool = true;
            }

            for operand in instr.operands() {
                if is_quoted_string(operand) {
                    seen_string = true;
                } else if is_bool_literal(operand) {
                    seen_bool = true;
                } else if is_temp(operand) || is_int_literal(operand) {
                    // No conclusion from other temps; int literals are the default anyway.
                } else {
                    match self.var_types.get(operand) {
                        Some(DeclaredType::String) => seen_string = true,
                        Some(DeclaredType::Bool) => seen_bool = true,
                        _ => {}
                    }
                }
            }
        }

        if seen_string {
            "std::string"
        } else if seen_bool {
            "bool"
        } else {
            "int"
        }
    }

    fn translate_instruction(&mut self, instr: &TacInstruction) {
        match instr {
            // Function labels never appear inside a range; ordinary labels become C++ labels.
            TacInstruction::Label { name } => {
                if !name.starts_with("func_") {
                    let _ = writeln!(self.out, "    {name}:");
                }
            }

            TacInstruction::Assign { dest, src } => self.emit_store(dest, src),

            TacInstruction::Binary { op, dest, lhs, rhs } => {
                let value = format!("{lhs} {op} {rhs}");
                self.emit_store(dest, &value);
            }

            TacInstruction::Unary { op, dest, operand } => {
                let value = format!("{op} {operand}");
                self.emit_store(dest, &value);
            }

            TacInstruction::Call { dest, callee, args } => {
                let call = format!("{callee}({})", args.join(", "));
                match dest {
                    Some(dest) => self.emit_store(dest, &call),
                    None => {
                        let _ = writeln!(self.out, "    {call};");
                    }
                }
            }

            // Every generated function returns int, so a valueless Slate return still returns a
            // value in the target.
            TacInstruction::Return { value: Some(value) } => {
                let _ = writeln!(self.out, "    return {value};");
            }
            TacInstruction::Return { value: None } => {
                let _ = writeln!(self.out, "    return 0;");
            }

            TacInstruction::Goto { target } => {
                let _ = writeln!(self.out, "    goto {target};");
            }

            TacInstruction::IfFalse { condition, target } => {
                let _ = writeln!(self.out, "    if (!({condition})) goto {target};");
            }

            TacInstruction::Print { value } => {
                let _ = writeln!(self.out, "    cout << {value};");
            }

            TacInstruction::Newline => {
                let _ = writeln!(self.out, "    cout << endl;");
            }

            TacInstruction::Input { name } => {
                let _ = writeln!(self.out, "    cin >> {name};");
            }
        }
    }

    /// Emits a store to `dest`. A name not yet declared in the current function gets a
    /// declaration with its inferred type; later stores are plain assignments.
    fn emit_store(&mut self, dest: &str, value: &str) {
        if self.declared.contains(dest) {
            let _ = writeln!(self.out, "    {dest} = {value};");
        } else {
            let dest_type = self.var_types.get(dest).copied().map(cpp_type_for).unwrap_or("int");
            let _ = writeln!(self.out, "    {dest_type} {dest} = {value};");
            self.declared.insert(dest.to_string());
        }
    }
}

fn collect_temps(instr: &TacInstruction, temps: &mut BTreeSet<String>) {
    if let Some(dest) = instr.dest() {
        if is_temp(dest) {
            temps.insert(dest.to_string());
        }
    }
    for operand in instr.operands() {
        if is_temp(operand) {
            temps.insert(operand.to_string());
        }
    }
}

fn render_params(func: &FunctionDecl) -> String {
    func.params
        .iter()
        .map(|param| format!("{} {}", cpp_type_for(param.declared_type), param.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cpp_type_for(declared_type: DeclaredType) -> &'static str {
    match declared_type {
        DeclaredType::Int => "int",
        DeclaredType::Bool => "bool",
        DeclaredType::String => "std::string",
    }
}

fn default_value_for_cpp_type(cpp_type: &str) -> &'static str {
    match cpp_type {
        "std::string" => "\"\"",
        "bool" => "false",
        _ => "0",
    }
}
