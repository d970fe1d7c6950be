use std::env;
use std::process::ExitCode;

use chess_rules::new_position;

fn usage() -> ExitCode {
    eprintln!("usage: position_status [--fen \"<record>\"] [--divide <depth>] <move1> <move2> ...");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut fen: Option<String> = None;
    let mut divide: Option<usize> = None;
    let mut moves: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fen" => match iter.next() {
                Some(value) => fen = Some(value.clone()),
                None => return usage(),
            },
            "--divide" => match iter.next().and_then(|v| v.parse().ok()) {
                Some(depth) => divide = Some(depth),
                None => return usage(),
            },
            "-h" | "--help" => return usage(),
            text => moves.push(text),
        }
    }

    let mut position = match new_position(fen.as_deref()) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for text in moves {
        if let Err(err) = position.make_move_text(text) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = position.legal_moves();
    println!("fen: {}", position.encode());
    println!("side_to_move: {}", position.side_to_move());
    println!("status: {}", position.status());
    println!("legal_moves: {}", legal_moves.len());
    for &mv in &legal_moves {
        println!("{mv} {}", position.notate(mv));
    }

    if let Some(depth) = divide {
        let mut total = 0;
        for (mv, nodes) in position.divide(depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("perft({depth}) = {total}");
    }
    ExitCode::SUCCESS
}
