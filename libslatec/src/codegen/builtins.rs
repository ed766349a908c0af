// Copyright 2025-2026 Neil Henderson
//
//! The `builtins` module holds the precanned helper routines the code generator can emit.
//!
//! These are a fixed library, emitted verbatim into the generated source for every routine
//! whose name appears as a call target, unless the user declared a function with that name.

/// The builtin routine table, in emission order.
#[rustfmt::skip]
pub const BUILTIN_ROUTINES: [(&str, &str); 16] = [
    ("repeat", "string repeat(string c, int times) { string s; for (int i = 0; i < times; ++i) s += c; return s; }\n"),
    ("pyramid", "void pyramid(int height) { for (int i = 1; i <= height; ++i) { for (int j = 0; j < height - i; ++j) cout << ' '; for (int j = 0; j < 2 * i - 1; ++j) cout << '*'; cout << endl; } }\n"),
    ("diamond", "void diamond(int height) { int n = height; for (int i = 1; i <= n; ++i) { for (int j = 0; j < n - i; ++j) cout << ' '; for (int j = 0; j < 2 * i - 1; ++j) cout << '*'; cout << endl; } for (int i = n - 1; i >= 1; --i) { for (int j = 0; j < n - i; ++j) cout << ' '; for (int j = 0; j < 2 * i - 1; ++j) cout << '*'; cout << endl; } }\n"),
    ("line", "void line(string c, int width) { for (int i = 0; i < width; ++i) cout << c; cout << endl; }\n"),
    ("box", "void box(string c, int width, int height) { for (int i = 0; i < height; ++i) { for (int j = 0; j < width; ++j) cout << c; cout << endl; } }\n"),
    ("stairs", "void stairs(int height, string c) { for (int i = 1; i <= height; ++i) { for (int j = 0; j < i; ++j) cout << c; cout << endl; } }\n"),
    ("max", "int max(int a, int b) { return a > b ? a : b; }\n"),
    ("min", "int min(int a, int b) { return a < b ? a : b; }\n"),
    ("abs", "int abs(int x) { return x < 0 ? -x : x; }\n"),
    ("pow", "int pow(int a, int b) { return static_cast<int>(std::pow(a, b)); }\n"),
    ("sqrt", "int sqrt(int n) { return static_cast<int>(std::sqrt(n)); }\n"),
    ("rangeSum", "int rangeSum(int n) { int s = 0; for (int i = 1; i <= n; ++i) s += i; return s; }\n"),
    ("factor", "void factor(int n) { for (int i = 2; i <= n; ++i) { while (n % i == 0) { cout << i << ' '; n /= i; } } cout << endl; }\n"),
    ("isPrime", "bool isPrime(int n) { if (n <= 1) return false; for (int i = 2; i * i <= n; ++i) if (n % i == 0) return false; return true; }\n"),
    ("table", "void table(int n) { for (int i = 1; i <= n; ++i) { for (int j = 1; j <= n; ++j) cout << i * j << '\t'; cout << endl; } }\n"),
    ("patternMultiply", "void patternMultiply(int a, int b) { for (int i = 0; i < a; ++i) { for (int j = 0; j < b; ++j) cout << '*'; cout << endl; } }\n"),
];

/// Is the given name one of the builtin routines?
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_ROUTINES.iter().any(|(builtin_name, _)| *builtin_name == name)
}
